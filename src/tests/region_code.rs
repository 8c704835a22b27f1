pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn gg() -> &'static str {
        "GG"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Region code for an unknown country, never present in test metadata.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
