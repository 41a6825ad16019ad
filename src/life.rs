#![allow(clippy::type_complexity)]

use bevy::{
    ecs::system::SystemState,
    input::common_conditions::input_just_pressed,
    math::{uvec2, vec2},
    prelude::*,
};

use crate::{
    palette::{Palette, PALETTE_SIZE},
    prelude::*,
    rules::Rules,
    simulation::Simulation,
    state::GameState,
};

pub struct LifePlugin;

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Board::default())
            .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .add_systems(
                OnEnter(GameState::Load),
                (load_meshes_and_materials, load_simulation, load_cell_board).chain(),
            )
            .add_systems(
                FixedUpdate,
                advance_generation.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                (
                    reseed_board.run_if(
                        input_just_pressed(KeyCode::KeyR).and(in_state(GameState::Paused)),
                    ),
                    toggle_running_and_paused.run_if(
                        input_just_pressed(KeyCode::Enter)
                            .and(in_state(GameState::Running).or(in_state(GameState::Paused))),
                    ),
                    paint_cells.run_if(resource_exists_and_changed::<Life>),
                )
                    .chain(),
            );
    }
}

// ——> SYSTEMS

/// initialize the cell mesh and one material per palette entry
fn load_meshes_and_materials(
    world: &mut World,
    params: &mut SystemState<(
        ResMut<Assets<Mesh>>,
        ResMut<Assets<ColorMaterial>>,
        Res<Board>,
    )>,
) {
    let (mut meshes, mut materials, board) = params.get_mut(world);
    let palette = Palette::default();

    let cell = meshes.add(Rectangle::from_size(board.cell_size));
    let dead = materials.add(ColorMaterial::from_color(BG_COLOR));
    let alive = (*palette.colors()).map(|color| materials.add(ColorMaterial::from_color(color)));

    world.insert_resource(MeshAndMats {
        cell,
        dead,
        alive,
        palette,
    });
}

/// allocate and seed the simulation, the seed is logged so a run can be replayed
fn load_simulation(
    mut commands: Commands,
    board: Res<Board>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let seed = fastrand::u64(..);
    let mut rng = fastrand::Rng::with_seed(seed);
    let (width, height) = (board.size.x as usize, board.size.y as usize);

    match Simulation::initialize(width, height, Rules::default(), &mut rng) {
        Ok(simulation) => {
            info!(
                "seeded {width}x{height} board with seed {seed}: {} cells alive",
                simulation.population()
            );
            commands.insert_resource(Life(simulation));
            commands.insert_resource(SeedRng(rng));
            next_state.set(GameState::Running);
        }
        Err(err) => {
            error!("failed to initialize simulation: {err}");
            exit.send(AppExit::error());
        }
    }
}

/// spawn one quad per grid cell, painted dead until the first repaint
fn load_cell_board(mut commands: Commands, board: Res<Board>, mesh_and_mats: Res<MeshAndMats>) {
    let cells_to_spawn = board
        .coords()
        .map(|cell_coord| {
            (
                Cell,
                GridPos(cell_coord),
                Mesh2d(mesh_and_mats.cell.clone()),
                MeshMaterial2d(mesh_and_mats.dead.clone()),
                Transform::from_translation(board.cell_coord_to_translation(cell_coord)),
            )
        })
        .collect::<Vec<_>>();
    commands.spawn_batch(cells_to_spawn);
}

fn advance_generation(mut life: ResMut<Life>) {
    life.advance();
    debug!(
        "generation {}: {} cells alive",
        life.generation(),
        life.population()
    );
}

fn reseed_board(mut life: ResMut<Life>, mut rng: ResMut<SeedRng>) {
    life.reseed(&mut rng.0);
    info!("reseeded board: {} cells alive", life.population());
}

fn toggle_running_and_paused(
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    life: Res<Life>,
) {
    match state.get() {
        GameState::Running => {
            info!("paused at generation {}", life.generation());
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("resumed at generation {}", life.generation());
            next_state.set(GameState::Running);
        }
        _ => unreachable!(),
    }
}

/// dead cells take the background material, live ones the palette entry for their age
fn paint_cells(
    life: Res<Life>,
    mesh_and_mats: Res<MeshAndMats>,
    mut cell_query: Query<(&GridPos, &mut MeshMaterial2d<ColorMaterial>), With<Cell>>,
) {
    for (pos, mut material) in cell_query.iter_mut() {
        let (x, y) = (pos.x as usize, pos.y as usize);
        let target = if life.alive(x, y) {
            mesh_and_mats.material_for(life.age(x, y))
        } else {
            &mesh_and_mats.dead
        };
        // only touch the component when the color actually changes
        if material.0 != *target {
            material.0 = target.clone();
        }
    }
}

// ——> COMPONENTS

#[derive(Component)]
#[require(GridPos, Mesh2d)]
struct Cell;

/// position of a cell quad on the simulation grid, `(0, 0)` is the top left corner
#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
struct GridPos(UVec2);

// ——> RESOURCES

/// the running simulation, read by the renderer and advanced on the fixed timestep
#[derive(Resource, Deref, DerefMut)]
pub struct Life(pub Simulation);

/// generator reused for reseeding
#[derive(Resource)]
struct SeedRng(fastrand::Rng);

/// hold handles for meshes and materials
#[derive(Resource, Clone)]
struct MeshAndMats {
    cell: Handle<Mesh>,
    dead: Handle<ColorMaterial>,
    /// one material per palette entry, in palette order
    alive: [Handle<ColorMaterial>; PALETTE_SIZE],
    palette: Palette,
}

impl MeshAndMats {
    #[inline]
    fn material_for(&self, age: u8) -> &Handle<ColorMaterial> {
        &self.alive[self.palette.index_for(age)]
    }
}

#[derive(Resource, Clone, Copy)]
struct Board {
    /// the center of the board
    center: Vec2,
    /// the amount of cells on each axis
    size: UVec2,
    /// the size of each individual cell
    cell_size: Vec2,
}

impl Board {
    /// computes full size of the board in pixels
    #[inline]
    fn pixel_size(&self) -> Vec2 {
        self.size.as_vec2() * self.cell_size
    }

    /// world position of a cell's center; rows grow downwards from the top left corner
    #[inline]
    fn cell_coord_to_translation(&self, cell_coord: UVec2) -> Vec3 {
        let top_left = self.center + vec2(-self.pixel_size().x, self.pixel_size().y) * 0.5;
        let offset = vec2(cell_coord.x as f32 + 0.5, -(cell_coord.y as f32 + 0.5));
        (top_left + offset * self.cell_size).extend(10.0)
    }

    fn coords(&self) -> impl Iterator<Item = UVec2> {
        let size = self.size;
        (0..size.y).flat_map(move |y| (0..size.x).map(move |x| uvec2(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            center: BOARD_POS,
            size: uvec2(
                grid_dimension(CANVAS_SIZE_PX.x, CELL_SIZE_PX) as u32,
                grid_dimension(CANVAS_SIZE_PX.y, CELL_SIZE_PX) as u32,
            ),
            cell_size: Vec2::splat(CELL_SIZE_PX),
        }
    }
}
