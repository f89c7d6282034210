//! Defines the Bevy [Plugin] for FlowFieldGrid
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod cost_layer;
pub mod target_layer;

/// Cost edits are applied before targets are changed so that a target request
/// is validated against the latest costs
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Apply [cost_layer::EventUpdateCostCell]
	Costs,
	/// Apply [target_layer::EventClearTarget] and [target_layer::EventSetTarget]
	Targets,
}

/// Processes cost edits and target requests against every [FlowFieldGrid] in the world
pub struct FlowFieldGridPlugin;

impl Plugin for FlowFieldGridPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.add_event::<cost_layer::EventUpdateCostCell>()
			.add_event::<target_layer::EventSetTarget>()
			.add_event::<target_layer::EventClearTarget>()
			.add_event::<target_layer::EventTargetRejected>()
			.configure_sets(Update, (OrderingSet::Costs, OrderingSet::Targets).chain())
			.add_systems(
				Update,
				(
					cost_layer::process_cost_updates.in_set(OrderingSet::Costs),
					(
						target_layer::process_clear_requests,
						target_layer::process_target_requests,
					)
						.chain()
						.in_set(OrderingSet::Targets),
				),
			);
	}
}
