use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flightsim::{
    components::{LocalVehicle, Telemetry, VehicleState},
    plugins::{flight_vehicle, FlightDynamicsPlugin},
    resources::{FlatGround, GroundSurface},
    systems::FlightDynamicsEngine,
};
use std::time::Duration;
use uuid::Uuid;

use super::create_test_engine;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    engine: Option<FlightDynamicsEngine>,
    ground_height: f64,
    time_step: f64,
    peer_id: Option<Uuid>,
    spawn_vehicle: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            engine: None,
            ground_height: 0.0,
            time_step: 1.0 / 60.0,
            peer_id: None,
            spawn_vehicle: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: FlightDynamicsEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_ground_height(mut self, height: f64) -> Self {
        self.ground_height = height;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_peer_id(mut self, id: Uuid) -> Self {
        self.peer_id = Some(id);
        self
    }

    pub fn without_vehicle(mut self) -> Self {
        self.spawn_vehicle = false;
        self
    }

    pub fn build(self) -> TestApp {
        let engine = self.engine.unwrap_or_else(create_test_engine);
        let ground = FlatGround::new(self.ground_height);

        let mut plugin = FlightDynamicsPlugin::new(engine.clone()).with_timestep(self.time_step);
        if let Some(id) = self.peer_id {
            plugin = plugin.with_peer_id(id);
        }

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.time_step,
            )))
            .insert_resource(GroundSurface::new(ground))
            .add_plugins(plugin);

        if self.spawn_vehicle {
            app.world_mut()
                .spawn((flight_vehicle(&engine, &ground), LocalVehicle));
        }

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn vehicle(&mut self) -> VehicleState {
        self.query_single::<VehicleState>()
            .cloned()
            .expect("one flight entity")
    }

    pub fn telemetry(&mut self) -> Telemetry {
        self.query_single::<Telemetry>()
            .cloned()
            .expect("one flight entity")
    }
}
