//! Flowfields are a means of handling pathfinding for a crowd of actors which
//! all head towards the same target.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [jdxdev](https://www.jdxdev.com/blog/2020/05/03/flowfields/)
//!
//! [leifnode](https://leifnode.com/2013/12/flow-field-pathfinding/)
//!
//! Rather than finding a path for each actor the whole map is solved once from
//! the target outwards, after which any actor anywhere on the map only needs
//! to read the direction under its feet.
//!
//! The map is a single [grid::FlowFieldGrid] of `width` by `height` cells with
//! column `x` growing East and row `y` growing North. It holds three 2D arrays:
//!
//! * Cost field - integer cost of traversing each cell, `1` is the default and
//! a value of `0` or less represents impassable terrain
//! * Integration field - the calculated cost-to-target of each cell, grown out
//! from the target across the orthogonal neighbours of each cell
//! * Flow field - a unit vector per cell pointing downhill along the
//! integration field towards the target, smoothed across neighbours
//!
//! ```text
//!  _____________________________
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! ```
//!
//! A [sampler::FlowSampler] then provides continuous directions for actors
//! positioned between cell centres.
//!

pub mod fields;
pub mod grid;
pub mod sampler;
pub mod solver;
pub mod utilities;
