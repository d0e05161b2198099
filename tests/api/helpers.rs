pub mod test_clues;
