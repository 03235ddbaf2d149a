/// Rough busy delay in milliseconds, assuming the 480 MHz core clock.
pub fn delay_ms(ms: u32) {
    cortex_m::asm::delay(480_000 * ms);
}
