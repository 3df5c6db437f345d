// src/classifier/mod.rs
// =============================================================================
// Link classification for a single page.
//
// Submodules:
// - base_url:   validates the base URL
// - predicates: decides whether an element is a page link, feed or stylesheet
// - domain:     scopes links to the base host and normalizes them
// - page:       PageLinkClassifier, which ties it all together and caches
// - report:     sorted, serializable snapshot of the results
// - error:      ClassifierError
// =============================================================================

mod base_url;
mod domain;
mod error;
mod page;
mod predicates;
mod report;

pub use base_url::validate_base_url;
pub use domain::{link_form, normalize_domain_link, LinkForm};
pub use error::{ClassifierError, Result};
pub use page::PageLinkClassifier;
pub use predicates::{has_image_extension, is_feed, is_page_link, is_stylesheet};
pub use report::{LinkCategory, LinkReport};
