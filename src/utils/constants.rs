/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via API_BASE_URL env var
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Moneda mostrada en precios
pub const CURRENCY: &str = match option_env!("CURRENCY") {
    Some(currency) => currency,
    None => "PKR",
};

/// Tarifa de envío fija del carrito
pub const DELIVERY_FEE: u64 = 200;

/// Impuesto sobre el subtotal, en porcentaje
pub const TAX_RATE_PERCENT: f64 = 5.0;

/// Formato de `now` en el endpoint de recordatorios (hora local, sin zona)
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
