//! A swarm of actors steering across a randomly walled map towards a single
//! target, run without a window for a fixed number of frames
//!

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_flowfield_grid_plugin::prelude::*;
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};

/// Number of columns and rows of the map
const MAP_SIZE: usize = 48;
/// World units per cell
const CELL_SIZE: f32 = 2.0;
/// Fixed time step of a frame
const DELTA: f32 = 1.0 / 60.0;
/// Number of frames to simulate
const FRAMES: usize = 1200;

/// Marks an actor and describes its movement
#[derive(Component)]
struct Actor {
	/// Position in world space
	position: Vec2,
	/// Current velocity
	velocity: Vec2,
}

/// Cell every actor is heading towards and the map it lies on
#[derive(Resource)]
struct Goal {
	/// Target cell
	cell: FieldCell,
	/// Map the actors move across
	dimensions: MapDimensions,
}

/// Run the simulation and report how many actors made it
fn main() {
	let mut app = App::new();
	app.add_plugins((LogPlugin::default(), FlowFieldGridPlugin))
		.add_systems(Startup, setup)
		.add_systems(Update, steer_actors.after(OrderingSet::Targets));
	for _ in 0..FRAMES {
		app.update();
	}
	let goal = app.world().resource::<Goal>();
	let (cell, dimensions) = (goal.cell, goal.dimensions);
	let mut query = app.world_mut().query::<&Actor>();
	let mut arrived = 0;
	let mut total = 0;
	for actor in query.iter(app.world()) {
		total += 1;
		if dimensions.get_field_cell_from_world(actor.position) == Some(cell) {
			arrived += 1;
		}
	}
	info!("{} of {} actors reached {:?}", arrived, total, cell.get_column_row());
}

/// Build a map where some cells are walls or swamp, spawn actors on passable cells and request a target
fn setup(mut commands: Commands, mut event_target: EventWriter<EventSetTarget>) {
	let mut rng = StdRng::seed_from_u64(3);
	let mut costs: Vec<i32> = (0..MAP_SIZE * MAP_SIZE)
		.map(|_| match rng.random_range(0..10) {
			0 | 1 => 0,
			2 => 4,
			_ => 1,
		})
		.collect();
	let goal = FieldCell::new(MAP_SIZE as i32 / 2, MAP_SIZE as i32 / 2);
	// make sure the goal itself can be stood on
	if let Some(i) = goal.to_index(MAP_SIZE, MAP_SIZE) {
		costs[i] = DEFAULT_COST;
	}
	let bundle = FlowFieldGridBundle::from_costs(&costs, MAP_SIZE, MAP_SIZE, CELL_SIZE).unwrap();
	let dimensions = bundle.get_map_dimensions();
	let spawns: Vec<FieldCell> = bundle
		.get_grid()
		.get_cost_field()
		.passable_cells()
		.choose_multiple(&mut rng, 200);
	commands.spawn(bundle);
	for cell in spawns {
		let centre = dimensions.grid_to_world(cell) + Vec2::splat(CELL_SIZE * 0.5);
		commands.spawn(Actor {
			position: centre,
			velocity: Vec2::ZERO,
		});
	}
	commands.insert_resource(Goal {
		cell: goal,
		dimensions,
	});
	event_target.write(EventSetTarget::new(goal));
}

/// Accelerate each actor along the sampled flow and move it
fn steer_actors(grid_q: Query<(&FlowFieldGrid, &MapDimensions)>, mut actor_q: Query<&mut Actor>) {
	/// Acceleration towards the flow
	const STEERING: f32 = 40.0;
	/// Speed limit in world units per second
	const MAX_SPEED: f32 = 6.0;
	let Ok((grid, dimensions)) = grid_q.single() else {
		return;
	};
	let sampler = grid.get_sampler();
	for mut actor in actor_q.iter_mut() {
		// sample from the centre of the cell the actor occupies
		let grid_position = dimensions.world_to_grid(actor.position) - Vec2::splat(0.5);
		let direction = sampler.sample(grid_position);
		let desired = direction * MAX_SPEED;
		let steering = (desired - actor.velocity).clamp_length_max(STEERING * DELTA);
		actor.velocity = (actor.velocity + steering).clamp_length_max(MAX_SPEED);
		let next = actor.position + actor.velocity * DELTA;
		// stay out of walls
		match dimensions.get_field_cell_from_world(next) {
			Some(cell) if !grid.is_impassable(cell) => actor.position = next,
			_ => actor.velocity = Vec2::ZERO,
		}
	}
}
