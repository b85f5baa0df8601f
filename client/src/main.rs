#[cfg(feature = "csr")]
fn main() {
    use genome_client::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
