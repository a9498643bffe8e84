/// Use cases module containing application business logic orchestration
mod recommend_dependencies;

pub use recommend_dependencies::RecommendDependenciesUseCase;
