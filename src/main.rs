mod boot;
mod dom;
mod globals;
mod listeners;
mod reveal;
mod scheduler;
mod site_config;

fn main() {
    console_error_panic_hook::set_once();
    boot::start();
}
