//! Building a document programmatically and round-tripping it.
//!
//! Run with: `cargo run --example roundtrip`

use toon_codec::{parse, serialize, toon, Document, Value};

fn main() {
    let value = toon!({
        "meta": {
            "version": 1.0,
            "stage": "engineer"
        },
        "tasks": [
            { "id": 1, "title": "draft schema", "done": true },
            { "id": 2, "title": "review output", "done": false }
        ]
    });

    let doc = match value {
        Value::Object(root) => Document::new(root),
        _ => unreachable!("toon! object literal"),
    };

    let text = serialize(&doc, 0);
    println!("{}", text);

    let reparsed = parse(&text);
    assert_eq!(reparsed, doc);
    println!("---\nround trip equal: true, diagnostics: {}", reparsed.diagnostics().len());
}
