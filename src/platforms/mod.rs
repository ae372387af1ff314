// Platform integrations — URL handling and per-platform content fetchers.
//
// Each submodule handles one platform's content surface. The shipping
// fetchers return fixed sample data; the real API clients will replace
// them behind the same trait.

pub mod instagram;
pub mod traits;
pub mod url;
pub mod youtube;
