use strum_macros::EnumIter;

/*
== Available models for the stator gap field ==================================
*/

// Dropdown in the UI will be automatically populated with these options
#[derive(Debug, PartialEq, Clone, Copy, EnumIter)]
pub enum FieldModel {
    Cosine,     // uniform gap field of strength B, flux follows N B A cos(theta)
    DipoleGrid, // field strength sampled from the two-pole vector grid
}

impl FieldModel {
    pub fn properties(&self) -> FieldModelProperties {
        // function separated out to allow for future flexibility
        self.retrieve_properties()
    }

    fn retrieve_properties(&self) -> FieldModelProperties {
        match self {
            FieldModel::Cosine => FieldModelProperties {
                name: "Uniform",
                description: "Uniform gap field, flux = N B A cos(θ)",
            },
            FieldModel::DipoleGrid => FieldModelProperties {
                name: "Two-pole grid",
                description: "Field strength sampled from a two-pole vector grid at the coil centre",
            },
        }
    }
}

pub struct FieldModelProperties {
    pub name: &'static str,
    pub description: &'static str,
}

impl Default for FieldModel {
    fn default() -> Self {
        FieldModel::Cosine
    }
}
