//! Strictly Web - trunk entry point.

fn main() {
    if let Err(err) = strictly_web::start() {
        web_sys::console::error_1(&err.to_string().into());
    }
}
