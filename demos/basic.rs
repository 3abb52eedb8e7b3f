//! Compile a small document exercising every construct and print the HTML.
//!
//! Run with: cargo run --example basic

use mdlite_parser::{tokenize, Parser};
use mdlite_render::generate;

fn main() -> mdlite_core::Result<()> {
    let document = "\
# mdlite

A *tiny* compiler for a restricted dialect of `markdown`.

> Read [the design notes](https://example.com/design) first.

```{2}
fn main() {
    println!(\"hello\");
}
```
";

    let tokens = tokenize(document)?;
    let blocks = Parser::new(tokens).parse()?;
    println!("{}", generate(&blocks));
    Ok(())
}
