/*!
apptree - visibility-clipped accessibility trees for desktop apps.

Enumerates on-screen windows, works out which parts of each window are
actually visible under front-to-back occlusion, and walks each application's
UI element hierarchy clipping every element to the visible portion of its
window. The result is a geometry-aware tree for screenshot annotation or
element targeting.

```ignore
use apptree::{build_visibility_index, ExtractOptions, Extractor};

let extractor = Extractor::new()?;

// Occlusion index for every on-screen window
let records = extractor.list_windows();
let index = build_visibility_index(&records);

// Clipped element trees for one app, depth-limited
let options = ExtractOptions::new().max_depth(10);
let trees = extractor.extract_bundle("com.apple.Notes", &options)?;

// Or a whole multi-app pass; per-app failures don't abort the rest
let result = extractor.extract_bundles(&extractor.visible_bundles(), &options);
```

Tree geometry is in logical points; [`Scale`] converts to pixels at the
image boundary.
*/

mod extract;
mod matching;
mod platform;
mod scale;
mod tree;
mod visibility;

pub mod a11y;
pub mod annotate;

mod types;
pub use types::*;

pub use crate::extract::{ExtractOptions, Extraction, Extractor};
pub use crate::matching::best_match;
pub use crate::scale::Scale;
pub use crate::visibility::{build_visibility_index, VisibilityEntry};
