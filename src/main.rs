fn main() {
    flappy_bevy::game::run();
}
