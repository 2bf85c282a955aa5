//! SEO layer: canonical and alternate URLs, Open Graph tags, head metadata,
//! structured data, sitemap and robots rules.
//!
//! Every function here is pure. The only shared input is the immutable `Site`
//! value and the process-wide locale registry, so concurrent callers never
//! contend on anything.

pub mod alternates;
pub mod head;
pub mod metadata;
pub mod open_graph;
pub mod robots;
pub mod site;
pub mod sitemap;
pub mod structured_data;
mod url;

pub use alternates::{Alternates, X_DEFAULT};
pub use metadata::{build_metadata, Metadata};
pub use open_graph::{og_locale, og_locale_alternates};
pub use robots::RobotsTxt;
pub use site::Site;
pub use sitemap::{PageDescriptor, SitemapEntry, PAGES};
