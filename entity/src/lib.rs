pub mod item;

/*
 One table. An item is a named, counted thing in the box:
 the store hands out the id, the quantity never goes below zero,
 and last_updated moves on every write so the list can show the
 most recently touched items first.
 */
