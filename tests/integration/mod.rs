//! Integration tests for the modelmap asset index


mod cli_context;
mod index_completeness;
mod selection;
mod textures;
