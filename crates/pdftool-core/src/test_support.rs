//! Shared fixtures for the crate's tests.
//!
//! Builds small in-memory PDFs with identifiable per-page content streams so
//! tests can assert that operations carry page content over untouched.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

/// Create a PDF with `num_pages` pages, each containing a unique text line
/// like `"<prefix> page 3"`.
#[allow(clippy::unwrap_used, clippy::cast_possible_wrap)]
pub fn build_test_pdf(num_pages: usize, prefix: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::with_capacity(num_pages);

    for page_num in 0..num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                ),
                Operation::new("Td", vec![Object::Integer(50), Object::Integer(700)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("{} page {}", prefix, page_num + 1).into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id =
            doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Create a PDF whose pages carry no attributes of their own: `MediaBox`
/// and `Resources` live on the root `Pages` node and are inherited.
#[allow(clippy::unwrap_used, clippy::cast_possible_wrap)]
pub fn build_inherited_pdf(num_pages: usize, prefix: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::with_capacity(num_pages);

    for page_num in 0..num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("{} page {}", prefix, page_num + 1).into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id =
            doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
        ),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        ),
        (
            "Resources",
            Object::Dictionary(Dictionary::from_iter([(
                "ProcSet",
                Object::Array(vec![Object::Name(b"PDF".to_vec())]),
            )])),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Content stream bytes of every page, in page order.
#[allow(clippy::unwrap_used)]
pub fn page_contents(bytes: &[u8]) -> Vec<Vec<u8>> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| doc.get_page_content(page_id).unwrap())
        .collect()
}
