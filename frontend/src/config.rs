#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend default BIND_ADDR when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend, same origin
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}
