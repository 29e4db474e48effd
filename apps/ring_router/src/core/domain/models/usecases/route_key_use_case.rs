use crate::core::domain::models::RoutedKey;

#[derive(Debug)]
pub struct RouteKeyUseCaseInput {
    pub key: String,
}

#[derive(Debug)]
pub struct RouteKeyUseCaseOutput {
    pub route: RoutedKey,
}
