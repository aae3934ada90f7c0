mod game;
mod registry;
mod wallet;
