use crate::orbit::OrbitalModel;
use crate::resources::Selection;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlEvent {
    TogglePlay,
    Reset,
    SelectNext,
    SelectPrevious,
    NudgeSpeed(f32),    // Signed change applied to the selected body's speed
}

impl ControlEvent {
    /// Applies the event to the model. Returns a line describing the change, for the log.
    pub fn apply(&self, model: &mut OrbitalModel, selection: &mut Selection, speed_step: f32) -> Option<String> {
        match *self {
            ControlEvent::TogglePlay => {
                let running = model.toggle_play();
                Some(if running { "Playing".to_owned() } else { "Paused".to_owned() })
            }
            ControlEvent::Reset => {
                model.reset();
                Some("Reset orbits".to_owned())
            }
            ControlEvent::SelectNext => {
                selection.next(model.bodies().len());
                speed_readout(model, selection)
            }
            ControlEvent::SelectPrevious => {
                selection.previous(model.bodies().len());
                speed_readout(model, selection)
            }
            ControlEvent::NudgeSpeed(delta) => {
                let id = selection.body(model)?.clone();
                let target = snap_to_step(model.speed(&id) + delta, speed_step);
                model.set_speed(&id, target);
                speed_readout(model, selection)
            }
        }
    }
}

// Speeds live on a slider grid of `step`, the same way a range input would snap them.
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

pub fn speed_readout(model: &OrbitalModel, selection: &Selection) -> Option<String> {
    let id = selection.body(model)?;
    Some(format!("{}: {:.2}", id, model.speed(id)))
}
