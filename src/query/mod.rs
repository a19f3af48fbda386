//! Query model rendered into Solr query syntax.
//!
//! Every query type implements [`Query`], whose only job is to produce the
//! string sent as the `q` (or `fq`, `facet.query`) parameter.

pub mod boolean;
pub mod escape;
#[allow(clippy::module_inception)]
pub mod query;
pub mod range;
pub mod term;

pub use self::boolean::{MultipleCriteriaQuery, Operator, QueryInList};
pub use self::escape::{escape_term, quote_phrase};
pub use self::query::{Query, SolrQuery};
pub use self::range::{Bound, QueryByRange};
pub use self::term::QueryByField;
