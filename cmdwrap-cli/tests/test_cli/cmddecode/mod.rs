mod basic;
mod interop;
