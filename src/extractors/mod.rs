pub mod onepiece;
