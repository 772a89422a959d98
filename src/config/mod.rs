pub mod descriptor;
pub mod settings;

pub use descriptor::{
    DescriptorSet, FileDescriptor, HttpBinding, HttpVerb, MethodDescriptor, ServiceDescriptor,
};
pub use settings::GeneratorConfig;
