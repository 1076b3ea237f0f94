pub mod credit_card;
