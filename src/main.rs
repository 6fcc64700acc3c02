#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod error;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod global_state;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod firmware;

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {
    eprintln!(
        "{} is firmware for the Raspberry Pi Pico; build it with --target thumbv6m-none-eabi",
        env!("CARGO_PKG_NAME")
    );
}
