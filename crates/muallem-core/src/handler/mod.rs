pub mod chat;
pub mod meta;
pub mod process;
pub mod studio;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub(crate) fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
