mod audit;
mod errors;
mod verbs;
