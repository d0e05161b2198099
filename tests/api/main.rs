mod console;
mod game;
mod helpers;
mod startup;
