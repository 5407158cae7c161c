pub mod bit_codec;
pub mod cipher_context;
pub mod des_key_schedule;
pub mod des_tables;
pub mod des_transformation;
pub mod error;
pub mod feistel_network;
