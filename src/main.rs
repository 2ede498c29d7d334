#![no_std]
#![no_main]

extern crate panic_semihosting;
use cortex_m::interrupt::free as interrupt_free;
use cortex_m_rt as rt;
use debounced_switch::Switch;
use stm32f0xx_hal::delay::Delay;
use stm32f0xx_hal::prelude::*;
use stm32f0xx_hal::stm32;

/// Time between polls of the switch, in milliseconds.
const POLL_INTERVAL_MS: u16 = 1;

/// Lights the orange LED of a 32F072BDISCOVERY board while a switch between PC4 and ground is held.
#[rt::entry]
fn main() -> ! {
    let mut dp = stm32::Peripherals::take().unwrap();
    let cp = stm32::CorePeripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().sysclk(8.mhz()).freeze(&mut dp.FLASH);
    let mut delay = Delay::new(cp.SYST, &rcc);

    let gpioc = dp.GPIOC.split(&mut rcc);
    let (switch_pin, mut led) = interrupt_free(|cs| {
        (
            gpioc.pc4.into_pull_up_input(cs),
            gpioc.pc8.into_push_pull_output(cs),
        )
    });
    let mut switch = Switch::new(switch_pin);
    led.set_low().ok();

    loop {
        // Only look for the edge that can follow the current state, so a release is not consumed
        // by a falling-edge poll.
        if switch.state().is_high() {
            if let Ok(true) = switch.is_falling(&mut delay) {
                led.set_high().ok();
            }
        } else if let Ok(true) = switch.is_rising(&mut delay) {
            led.set_low().ok();
        }
        delay.delay_ms(POLL_INTERVAL_MS);
    }
}
