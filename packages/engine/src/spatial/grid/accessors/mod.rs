mod color;
mod pointers;
