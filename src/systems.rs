use amethyst::{
    ecs::{System, SystemData, Write, WriteStorage, ReadStorage, ReaderId, Read, Join, World},
    core::{
        transform::Transform,
        SystemDesc,
        Time,
    },
    shrev::EventChannel,
    shred::ResourceId,
    input::{InputHandler, StringBindings},
};
use crate::components::*;
use crate::resources::*;
use crate::events::ControlEvent;
use crate::orbit::{self, OrbitalModel};

pub const DEFAULT_MAX_FRAME: f32 = 1.0;    // Seconds; longer frames come from a stalled window

/// Frame time fed to the animation. Clock hiccups count as 0, a stalled window is cut to `max_frame`.
pub fn frame_step(delta_seconds: f32, max_frame: f32) -> f32 {
    orbit::sanitize_step(delta_seconds).min(max_frame)
}


// Reads the key bindings and turns fresh presses into control events.
pub struct ControlInputSystem {
    speed_step: f32,
}

impl ControlInputSystem {
    pub fn new(speed_step: f32) -> Self {
        Self { speed_step }
    }
}

impl<'a> System<'a> for ControlInputSystem {
    type SystemData = (
        Read<'a, InputHandler<StringBindings>>,
        Write<'a, KeyLatch>,
        Write<'a, EventChannel<ControlEvent>>,
    );

    fn run(&mut self, (input, mut latch, mut control_channel): Self::SystemData) {
        let bindings = [
            ("toggle_play", ControlEvent::TogglePlay),
            ("reset", ControlEvent::Reset),
            ("next_body", ControlEvent::SelectNext),
            ("previous_body", ControlEvent::SelectPrevious),
            ("speed_up", ControlEvent::NudgeSpeed(self.speed_step)),
            ("speed_down", ControlEvent::NudgeSpeed(-self.speed_step)),
        ];

        for &(action, event) in bindings.iter() {
            let is_down = input.action_is_down(action).unwrap_or(false);
            if latch.pressed(action, is_down) {
                control_channel.single_write(event);
            }
        }
    }
}


// Only place input mutates the orbital model.
pub struct ControlProcessingSystem {
    reader_id: ReaderId<ControlEvent>,
    speed_step: f32,
}

impl<'a> System<'a> for ControlProcessingSystem {
    type SystemData = (
        Read<'a, EventChannel<ControlEvent>>,
        Write<'a, OrbitalModel>,
        Write<'a, Selection>,
    );

    fn run(&mut self, (events, mut model, mut selection): Self::SystemData) {
        for event in events.read(&mut self.reader_id) {
            debug!("ControlEvent: {:?}", event);
            if let Some(line) = event.apply(&mut model, &mut selection, self.speed_step) {
                info!("{}", line);
            }
        }
    }
}

impl ControlProcessingSystem {
    pub fn new(reader_id: ReaderId<ControlEvent>, speed_step: f32) -> Self {
        Self { reader_id, speed_step }
    }
}

pub struct ControlProcessingSystemDesc {
    pub speed_step: f32,
}

impl<'a, 'b> SystemDesc<'a, 'b, ControlProcessingSystem> for ControlProcessingSystemDesc {
    fn build(self, world: &mut World) -> ControlProcessingSystem {
        <ControlProcessingSystem as System<'_>>::SystemData::setup(world);

        let reader_id = world.fetch_mut::<EventChannel<ControlEvent>>().register_reader();
        ControlProcessingSystem::new(reader_id, self.speed_step)
    }
}


#[derive(SystemData)]
pub struct BodyPlacementData<'a> { // Where each body is drawn
    pub handles: Read<'a, BodyHandles>,
    pub transforms: WriteStorage<'a, Transform>,
}

// Advances the orbits by the frame time and moves the body entities to match.
pub struct OrbitSystem {
    pub max_frame: f32,
}

impl<'a> System<'a> for OrbitSystem {
    type SystemData = (
        Read<'a, Time>,
        Write<'a, OrbitalModel>,
        BodyPlacementData<'a>,
    );

    fn run(&mut self, (time, mut model, mut placement): Self::SystemData) {
        model.tick(frame_step(time.delta_seconds(), self.max_frame));

        for (id, entity) in placement.handles.iter() {
            if let Some(transform) = placement.transforms.get_mut(*entity) {
                let pos = model.position(id);
                transform.set_translation_xyz(pos.x, pos.y, pos.z);
            }
        }
    }
}


pub struct SpinSystem {
    pub max_frame: f32,
}

impl<'a> System<'a> for SpinSystem {
    type SystemData = (
        Read<'a, Time>,
        Read<'a, OrbitalModel>,
        WriteStorage<'a, Transform>,
        ReadStorage<'a, Spin>,
    );

    fn run(&mut self, (time, model, mut transforms, spins): Self::SystemData) {
        if !model.is_running() {
            return;
        }
        let dt = frame_step(time.delta_seconds(), self.max_frame);

        for (transform, spin) in (&mut transforms, &spins).join() {
            transform.prepend_rotation_y_axis(spin.0 * dt);
        }
    }
}
