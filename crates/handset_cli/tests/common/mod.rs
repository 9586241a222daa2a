//! Expected command output.

pub const ME_FONE12_BROCHURE: &str = include_str!("../../../handset/fixtures/me_fone12_brochure.txt");
pub const BIRD_SUNG_T8_BROCHURE: &str = include_str!("../../../handset/fixtures/bird_sung_t8_brochure.txt");
pub const ME_FONE12_REPORT: &str = include_str!("../../../handset/fixtures/me_fone12_report.txt");
pub const BIRD_SUNG_T8_REPORT: &str = include_str!("../../../handset/fixtures/bird_sung_t8_report.txt");
