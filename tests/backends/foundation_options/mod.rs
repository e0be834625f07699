mod contention;
mod pipelines;
