//! Multi-source label propagation over cardinal adjacency.
//!
//! A walk keeps an open set (the frontier) and a closed set (squares whose
//! value is final). Each popped square that is not yet closed gets closed and
//! handed to the caller's visit function, which writes that square's value
//! and returns the squares to consider next. A closed square is never
//! visited again, so a walk does at most one visit per square, and the value
//! a square receives is whatever its closed neighbors allowed at that moment.

use crate::hlt::cell::Cell;
use crate::hlt::game_map::GameMap;
use crate::hlt::position::Position;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Which open square is expanded next.
pub enum PopOrder<K> {
    /// Insertion order.
    First,
    /// Smallest key first, insertion order among equal keys. The key is taken
    /// when the square enters the open set.
    MinBy(K),
}

/// Squares closed by a walk, indexed row-major.
pub struct ClosedSet {
    width: usize,
    marks: Vec<bool>,
    order: Vec<Position>,
}

impl ClosedSet {
    fn new(map: &GameMap) -> ClosedSet {
        ClosedSet {
            width: map.width,
            marks: vec![false; map.cell_count()],
            order: Vec::new(),
        }
    }

    /// `cell` must come from the walked map (its position is normalized).
    pub fn contains(&self, cell: &Cell) -> bool {
        self.marks[cell.position.y as usize * self.width + cell.position.x as usize]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Closing order.
    pub fn order(&self) -> &[Position] {
        &self.order
    }
}

struct OpenSet<T> {
    queue: VecDeque<usize>,
    heap: BinaryHeap<Reverse<(T, usize, usize)>>,
    in_open: Vec<bool>,
    sequence: usize,
}

impl<T: Ord> OpenSet<T> {
    fn new(cell_count: usize) -> OpenSet<T> {
        OpenSet {
            queue: VecDeque::new(),
            heap: BinaryHeap::new(),
            in_open: vec![false; cell_count],
            sequence: 0,
        }
    }

    fn push<K: Fn(&Cell) -> T>(&mut self, cell: &Cell, index: usize, pop_order: &PopOrder<K>) {
        if self.in_open[index] {
            return;
        }
        self.in_open[index] = true;
        match pop_order {
            PopOrder::First => self.queue.push_back(index),
            PopOrder::MinBy(key) => {
                self.heap.push(Reverse((key(cell), self.sequence, index)));
                self.sequence += 1;
            }
        }
    }

    fn pop<K>(&mut self, pop_order: &PopOrder<K>) -> Option<usize> {
        let index = match pop_order {
            PopOrder::First => self.queue.pop_front(),
            PopOrder::MinBy(_) => self.heap.pop().map(|Reverse((_, _, index))| index),
        }?;
        self.in_open[index] = false;
        Some(index)
    }
}

pub fn walk_set<K, T, V, I>(
    map: &GameMap,
    seeds: &[Position],
    pop_order: PopOrder<K>,
    mut visit: V,
) -> ClosedSet
where
    K: Fn(&Cell) -> T,
    T: Ord,
    V: FnMut(&Cell, &ClosedSet) -> I,
    I: IntoIterator<Item = Position>,
{
    let mut closed = ClosedSet::new(map);
    let mut open: OpenSet<T> = OpenSet::new(map.cell_count());

    for seed in seeds {
        let index = map.index(seed);
        open.push(map.at_index(index), index, &pop_order);
    }

    while let Some(index) = open.pop(&pop_order) {
        if closed.marks[index] {
            continue;
        }
        closed.marks[index] = true;

        let cell = map.at_index(index);
        closed.order.push(cell.position);

        for next in visit(cell, &closed) {
            let next_index = map.index(&next);
            if !closed.marks[next_index] {
                open.push(map.at_index(next_index), next_index, &pop_order);
            }
        }
    }

    closed
}

/// Reachability walk in insertion order.
pub fn bfs<V, I>(map: &GameMap, seeds: &[Position], visit: V) -> ClosedSet
where
    V: FnMut(&Cell, &ClosedSet) -> I,
    I: IntoIterator<Item = Position>,
{
    walk_set(map, seeds, PopOrder::<fn(&Cell) -> usize>::First, visit)
}

/// Greedy walk expanding the open square with the smallest key.
pub fn nearest_first<K, T, V, I>(map: &GameMap, seeds: &[Position], key: K, visit: V) -> ClosedSet
where
    K: Fn(&Cell) -> T,
    T: Ord,
    V: FnMut(&Cell, &ClosedSet) -> I,
    I: IntoIterator<Item = Position>,
{
    walk_set(map, seeds, PopOrder::MinBy(key), visit)
}
