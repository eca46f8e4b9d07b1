//! WASM entry point for Leptos CSR app

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        leptos::mount::mount_to_body(leadboard_web::App);
    }
}
