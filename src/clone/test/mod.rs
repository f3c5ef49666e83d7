mod fake;
mod id_map;
