pub struct Banner;

impl Banner {
    pub fn text() -> String {
        format!(
            "Bank Sim {} ({}, {})",
            env!("CARGO_PKG_VERSION"),
            env!("BANK_SIM_BUILD_HASH"),
            env!("BANK_SIM_BUILD_PROFILE"),
        )
    }
}
