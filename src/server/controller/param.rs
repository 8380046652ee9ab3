use serde::Deserialize;

/// `?pagina=N` query string of administrator listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParam {
    pub pagina: Option<i64>,
}

/// `?pagina=N&nome=...&marca=...` query string of vehicle listings.
#[derive(Debug, Default, Deserialize)]
pub struct VehicleListParam {
    pub pagina: Option<i64>,
    /// Substring the vehicle name must contain
    pub nome: Option<String>,
    /// Substring the vehicle brand must contain
    pub marca: Option<String>,
}
