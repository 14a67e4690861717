mod num_ext;
mod complex_ext;
mod ratio_ext;
