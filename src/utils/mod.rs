// Thu Aug 27 2026 - Alex

pub mod logging;
