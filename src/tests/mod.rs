mod test_from_yaml;
mod test_continuity;
