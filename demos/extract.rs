//! Pulling structured data out of a chatty model reply.
//!
//! Run with: `cargo run --example extract`

use toon_codec::{extract_and_parse, serialize};

fn main() {
    let reply = "\
Sure! Based on the analysis, here are the findings:

```toon
summary:
  risk_level: medium
  confidence: 0.82
findings:
  component, severity, count
  auth, high, 3
  billing, low, 7
```

Let me know if you want a deeper breakdown.";

    let doc = extract_and_parse(reply);

    let summary = doc
        .root()
        .get("summary")
        .and_then(|v| v.as_object())
        .expect("summary present");
    println!(
        "risk level: {}",
        summary.get("risk_level").and_then(|v| v.as_str()).unwrap_or("?")
    );

    let findings = doc
        .root()
        .get("findings")
        .and_then(|v| v.as_table())
        .expect("findings present");
    for record in findings.records() {
        println!(
            "  {} -> {} ({} issues)",
            record.get("component").map(ToString::to_string).unwrap_or_default(),
            record.get("severity").map(ToString::to_string).unwrap_or_default(),
            record.get("count").map(ToString::to_string).unwrap_or_default(),
        );
    }

    // A reply with no decodable content degrades to an empty document.
    let miss = extract_and_parse("I'm sorry, I can't help with that.");
    println!("prose-only reply is empty: {}", miss.is_empty());

    // Round-tripped text ready for re-injection into the next prompt.
    println!("---\n{}", serialize(&doc, 0));
}
