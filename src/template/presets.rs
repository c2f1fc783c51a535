//! Built-in category/task presets.

use crate::config::names::normalize_key;
use crate::error::{PaletteError, Result};

/// A task created under a tier2 category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    /// Stable identifier, unique across all presets.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A tier2 category and its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier2Template {
    pub name: &'static str,
    pub tasks: &'static [TaskTemplate],
}

/// A tier1 category and its tier2 children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier1Template {
    pub name: &'static str,
    pub children: &'static [Tier2Template],
}

/// A named set of categories and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatePreset {
    /// Lookup key; also the prefix of every template id in the preset.
    pub key: &'static str,
    pub name: &'static str,
    pub tier1: &'static [Tier1Template],
}

impl TemplatePreset {
    /// Template id recorded on a tier1 row.
    pub fn tier1_id(&self, tier1: &Tier1Template) -> String {
        format!("{}.{}", self.key, normalize_key(tier1.name))
    }

    /// Template id recorded on a tier2 row.
    pub fn tier2_id(&self, tier1: &Tier1Template, tier2: &Tier2Template) -> String {
        format!("{}.{}", self.tier1_id(tier1), normalize_key(tier2.name))
    }

    /// Whether a stored template id was produced by this preset.
    pub fn owns(&self, template_id: &str) -> bool {
        template_id
            .strip_prefix(self.key)
            .is_some_and(|rest| rest.starts_with('.'))
    }

    /// Number of category rows the preset creates.
    pub fn category_count(&self) -> usize {
        self.tier1.iter().map(|t| 1 + t.children.len()).sum()
    }

    /// Number of task rows the preset creates.
    pub fn task_count(&self) -> usize {
        self.tier1
            .iter()
            .flat_map(|t| t.children)
            .map(|c| c.tasks.len())
            .sum()
    }
}

macro_rules! task {
    ($id:literal, $title:literal, $description:literal) => {
        TaskTemplate {
            id: $id,
            title: $title,
            description: $description,
        }
    };
}

static CONSTRUCTION: TemplatePreset = TemplatePreset {
    key: "construction",
    name: "Residential Construction",
    tier1: &[
        Tier1Template {
            name: "Permitting",
            children: &[
                Tier2Template {
                    name: "Site Survey",
                    tasks: &[
                        task!("construction.permitting.site-survey.boundary", "Boundary survey", "Order boundary and topographic survey"),
                        task!("construction.permitting.site-survey.soils", "Soils report", "Collect geotechnical soils report"),
                    ],
                },
                Tier2Template {
                    name: "Drawings",
                    tasks: &[
                        task!("construction.permitting.drawings.plans", "Construction plans", "Finalize architectural and structural plans"),
                        task!("construction.permitting.drawings.review", "Plan review", "Address plan review comments"),
                    ],
                },
                Tier2Template {
                    name: "Building Permits",
                    tasks: &[
                        task!("construction.permitting.permits.apply", "Permit application", "Submit building permit application"),
                        task!("construction.permitting.permits.inspections", "Inspection schedule", "Book required municipal inspections"),
                    ],
                },
            ],
        },
        Tier1Template {
            name: "Structural",
            children: &[
                Tier2Template {
                    name: "Foundation",
                    tasks: &[
                        task!("construction.structural.foundation.excavate", "Excavation", "Excavate and grade footing trenches"),
                        task!("construction.structural.foundation.pour", "Pour footings", "Form, inspect and pour footings and walls"),
                    ],
                },
                Tier2Template {
                    name: "Framing",
                    tasks: &[
                        task!("construction.structural.framing.walls", "Wall framing", "Frame exterior and interior walls"),
                        task!("construction.structural.framing.floors", "Floor systems", "Set joists and subfloor"),
                    ],
                },
                Tier2Template {
                    name: "Roofing",
                    tasks: &[
                        task!("construction.structural.roofing.trusses", "Roof trusses", "Set trusses and roof sheathing"),
                        task!("construction.structural.roofing.shingles", "Shingles", "Install underlayment and shingles"),
                    ],
                },
            ],
        },
        Tier1Template {
            name: "Systems",
            children: &[
                Tier2Template {
                    name: "Electrical",
                    tasks: &[
                        task!("construction.systems.electrical.rough", "Electrical rough-in", "Run circuits, boxes and panel"),
                        task!("construction.systems.electrical.trim", "Electrical trim", "Install devices and fixtures"),
                    ],
                },
                Tier2Template {
                    name: "Plumbing",
                    tasks: &[
                        task!("construction.systems.plumbing.rough", "Plumbing rough-in", "Install supply and drain lines"),
                        task!("construction.systems.plumbing.trim", "Plumbing trim", "Set fixtures and test pressure"),
                    ],
                },
                Tier2Template {
                    name: "HVAC",
                    tasks: &[
                        task!("construction.systems.hvac.ducts", "Ductwork", "Install supply and return ducts"),
                        task!("construction.systems.hvac.equipment", "Equipment", "Set furnace and condenser"),
                    ],
                },
            ],
        },
        Tier1Template {
            name: "Sheathing",
            children: &[
                Tier2Template {
                    name: "Barriers",
                    tasks: &[
                        task!("construction.sheathing.barriers.wrap", "House wrap", "Install weather-resistive barrier"),
                        task!("construction.sheathing.barriers.insulation", "Insulation", "Insulate walls and attic"),
                    ],
                },
                Tier2Template {
                    name: "Drywall",
                    tasks: &[
                        task!("construction.sheathing.drywall.hang", "Hang drywall", "Hang board on walls and ceilings"),
                        task!("construction.sheathing.drywall.finish", "Tape and finish", "Tape, mud and sand joints"),
                    ],
                },
                Tier2Template {
                    name: "Exteriors",
                    tasks: &[
                        task!("construction.sheathing.exteriors.siding", "Siding", "Install siding and trim"),
                        task!("construction.sheathing.exteriors.gutters", "Gutters", "Hang gutters and downspouts"),
                    ],
                },
            ],
        },
        Tier1Template {
            name: "Finishings",
            children: &[
                Tier2Template {
                    name: "Windows",
                    tasks: &[
                        task!("construction.finishings.windows.install", "Window install", "Set and flash windows"),
                        task!("construction.finishings.windows.trim", "Window trim", "Case windows inside"),
                    ],
                },
                Tier2Template {
                    name: "Doors",
                    tasks: &[
                        task!("construction.finishings.doors.exterior", "Exterior doors", "Hang and weatherstrip exterior doors"),
                        task!("construction.finishings.doors.interior", "Interior doors", "Hang interior doors and hardware"),
                    ],
                },
                Tier2Template {
                    name: "Cabinets",
                    tasks: &[
                        task!("construction.finishings.cabinets.install", "Cabinet install", "Set base and upper cabinets"),
                        task!("construction.finishings.cabinets.counters", "Countertops", "Template and install countertops"),
                    ],
                },
                Tier2Template {
                    name: "Fixtures",
                    tasks: &[
                        task!("construction.finishings.fixtures.lighting", "Light fixtures", "Hang light fixtures"),
                        task!("construction.finishings.fixtures.bath", "Bath fixtures", "Install bath accessories and mirrors"),
                    ],
                },
                Tier2Template {
                    name: "Flooring",
                    tasks: &[
                        task!("construction.finishings.flooring.tile", "Tile", "Set tile in wet areas"),
                        task!("construction.finishings.flooring.wood", "Hardwood", "Install and finish hardwood"),
                    ],
                },
            ],
        },
    ],
};

static WORKOUT: TemplatePreset = TemplatePreset {
    key: "workout",
    name: "Workout Split",
    tier1: &[
        Tier1Template {
            name: "Push",
            children: &[
                Tier2Template {
                    name: "Chest",
                    tasks: &[task!("workout.push.chest.bench", "Bench press", "4 sets of 6-8")],
                },
                Tier2Template {
                    name: "Shoulders",
                    tasks: &[task!("workout.push.shoulders.press", "Overhead press", "3 sets of 8")],
                },
                Tier2Template {
                    name: "Triceps",
                    tasks: &[task!("workout.push.triceps.dips", "Dips", "3 sets to failure")],
                },
            ],
        },
        Tier1Template {
            name: "Pull",
            children: &[
                Tier2Template {
                    name: "Back",
                    tasks: &[task!("workout.pull.back.rows", "Barbell rows", "4 sets of 8")],
                },
                Tier2Template {
                    name: "Biceps",
                    tasks: &[task!("workout.pull.biceps.curls", "Curls", "3 sets of 10")],
                },
            ],
        },
        Tier1Template {
            name: "Legs",
            children: &[
                Tier2Template {
                    name: "Quads",
                    tasks: &[task!("workout.legs.quads.squat", "Back squat", "5 sets of 5")],
                },
                Tier2Template {
                    name: "Hamstrings",
                    tasks: &[task!("workout.legs.hamstrings.rdl", "Romanian deadlift", "3 sets of 8")],
                },
                Tier2Template {
                    name: "Calves",
                    tasks: &[task!("workout.legs.calves.raises", "Calf raises", "4 sets of 12")],
                },
            ],
        },
        Tier1Template {
            name: "Cardio",
            children: &[
                Tier2Template {
                    name: "Intervals",
                    tasks: &[task!("workout.cardio.intervals.sprints", "Sprints", "8 x 30s on, 90s off")],
                },
                Tier2Template {
                    name: "Endurance",
                    tasks: &[task!("workout.cardio.endurance.run", "Long run", "45 minutes easy pace")],
                },
            ],
        },
    ],
};

/// All built-in presets.
pub static PRESETS: [&TemplatePreset; 2] = [&CONSTRUCTION, &WORKOUT];

/// Keys of the built-in presets.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.key).collect()
}

/// Find a preset by key or display name.
pub fn preset_by_name(name: &str) -> Result<&'static TemplatePreset> {
    let key = normalize_key(name);
    PRESETS
        .iter()
        .copied()
        .find(|p| p.key == key || normalize_key(p.name) == key)
        .ok_or_else(|| PaletteError::UnknownPreset {
            name: name.to_string(),
            available: preset_names().join(", "),
        })
}
