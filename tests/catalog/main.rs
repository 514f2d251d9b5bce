mod deployments;
mod lookup;
mod relationships;
