mod helpers;
mod json_api;
mod map_fragments;
