pub mod instanced_ensemble_plugin;

pub use instanced_ensemble_plugin::{
    EnsembleInstance, EnsembleInstanceData, InstancedEnsemblePlugin,
};
