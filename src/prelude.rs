//! `use bevy_flowfield_grid_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::flowfields::{
	fields::{cost_field::*, flow_field::*, integration_field::*, *},
	grid::*,
	sampler::*,
	solver::*,
	utilities::*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	error::*,
	plugin::{cost_layer::*, target_layer::*, *},
};
