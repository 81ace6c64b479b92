/// Routes `log` output to the test harness. Safe to call from every test.
pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// An RNG that always yields its maximum output, pushing every float sample
/// to the top of its range.
pub struct SaturatedRng;

impl rand::RngCore for SaturatedRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(u8::MAX);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
