//! Page-level document operations: merge, delete-pages, page-count.
//!
//! Each operation reads its input buffers, produces a fresh output buffer,
//! and touches no shared state. Page content streams are carried over as-is;
//! only object ids and the page tree are rewritten.

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use crate::document::PdfDocument;
use crate::error::{Error, Result};
use crate::selection::PageSelection;

/// Merge two or more PDFs into one, in input order.
///
/// Fails with [`Error::InsufficientInputs`] for fewer than 2 inputs and with
/// [`Error::UnreadableDocument`] naming the position of the first input that
/// does not parse. The output's page count is the sum of the inputs' page
/// counts; within each input, native page order is preserved.
pub fn merge<B: AsRef<[u8]>>(inputs: &[B]) -> Result<Vec<u8>> {
    if inputs.len() < 2 {
        return Err(Error::InsufficientInputs {
            given: inputs.len(),
        });
    }

    let mut output = Document::with_version("1.5");
    let mut next_id: u32 = 1;
    let mut page_order: Vec<ObjectId> = Vec::new();

    for (position, input) in inputs.iter().enumerate() {
        let mut doc =
            Document::load_mem(input.as_ref()).map_err(|e| Error::UnreadableDocument {
                position,
                reason: e.to_string(),
            })?;

        // Shift this document's object ids past everything imported so far
        doc.renumber_objects_with(next_id);
        next_id = doc.max_id + 1;

        // get_pages is keyed by 1-based page number, so values() is page order
        let pages = doc.get_pages();
        for &page_id in pages.values() {
            flatten_inherited_attributes(&mut doc, page_id);
        }
        page_order.extend(pages.into_values());

        for (id, object) in doc.objects {
            match object.type_name().unwrap_or(b"") {
                // The combined catalog and page tree are rebuilt below
                b"Catalog" | b"Pages" | b"Outlines" | b"Outline" => {}
                _ => {
                    output.objects.insert(id, object);
                }
            }
        }
    }

    output.max_id = next_id - 1;
    let pages_id = output.new_object_id();
    let catalog_id = output.new_object_id();

    // Reparent every imported page onto the single new page tree node
    for &page_id in &page_order {
        if let Some(Object::Dictionary(dict)) = output.objects.get_mut(&page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let kids: Vec<Object> = page_order
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    #[allow(clippy::cast_possible_wrap)]
    let pages_dict = Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_order.len() as i64)),
    ]);
    output.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_dict = Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    output
        .objects
        .insert(catalog_id, Object::Dictionary(catalog_dict));
    output.trailer.set("Root", Object::Reference(catalog_id));

    output.renumber_objects();

    debug!(
        inputs = inputs.len(),
        pages = page_order.len(),
        "merged documents"
    );

    serialize(output)
}

/// Page-tree keys a page may inherit from ancestor `Pages` nodes.
const INHERITED_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Copy inherited page-tree attributes onto the page dictionary itself.
///
/// Merging discards the source `Pages` nodes, so anything a page inherits
/// from them (Resources, MediaBox, ...) must be flattened onto the page
/// before it is reparented. Pages with an irregular structure are left
/// as-is.
fn flatten_inherited_attributes(doc: &mut Document, page_id: ObjectId) {
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();

    if let Ok(page) = doc.get_object(page_id).and_then(|obj| obj.as_dict()) {
        for &key in &INHERITED_PAGE_KEYS {
            if page.has(key) {
                continue;
            }

            let mut ancestor = page.get(b"Parent").and_then(|obj| obj.as_reference()).ok();
            while let Some(node_id) = ancestor {
                let Ok(node) = doc.get_dictionary(node_id) else {
                    break;
                };
                if let Ok(value) = node.get(key) {
                    inherited.push((key, value.clone()));
                    break;
                }
                ancestor = node.get(b"Parent").and_then(|obj| obj.as_reference()).ok();
            }
        }
    }

    if inherited.is_empty() {
        return;
    }

    if let Ok(page) = doc
        .get_object_mut(page_id)
        .and_then(|obj| obj.as_dict_mut())
    {
        for (key, value) in inherited {
            page.set(key, value);
        }
    }
}

/// Produce a copy of `document` with the selected pages removed.
///
/// Every index in `selection` is re-validated against the document's actual
/// page count, and at least one page must survive. Surviving pages keep
/// their relative order.
pub fn delete_pages(document: &PdfDocument, selection: &PageSelection) -> Result<Vec<u8>> {
    let mut doc = document.open()?;
    let page_count = doc.get_pages().len();

    if let Some(max) = selection.max_index()
        && max >= page_count
    {
        return Err(Error::PageOutOfBounds {
            page: max + 1,
            total: page_count,
        });
    }

    if selection.len() >= page_count {
        return Err(Error::CannotDeleteAllPages { total: page_count });
    }

    if !selection.is_empty() {
        // lopdf numbers pages from 1
        #[allow(clippy::cast_possible_truncation)]
        let numbers: Vec<u32> = selection.iter().map(|index| index as u32 + 1).collect();
        doc.delete_pages(&numbers);
        doc.prune_objects();
    }

    debug!(
        deleted = selection.len(),
        remaining = page_count - selection.len(),
        "deleted pages"
    );

    serialize(doc)
}

/// Parse a document buffer and return its page count.
pub fn page_count(bytes: &[u8]) -> Result<usize> {
    let doc = Document::load_mem(bytes).map_err(|e| Error::UnreadableDocument {
        position: 0,
        reason: e.to_string(),
    })?;
    Ok(doc.get_pages().len())
}

fn serialize(mut doc: Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| Error::PdfSave(e.to_string()))?;
    Ok(buffer)
}
