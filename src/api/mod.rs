pub mod documents;

pub use documents::{
    parse_document, DocumentClient, RawDocuments, CHAMPIONS_COMBINADAS_DOCUMENT,
    CHAMPIONS_DATA_DOCUMENT, COMBINADAS_DOCUMENT, HISTORIAL_DOCUMENT, OPTIONAL_DOCUMENTS,
    PRIMARY_DOCUMENT,
};
